use fetchdog_engine::Simulation;

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(1280, 720);
    sim.enable_perf_metrics(true);
    sim.throw_ball(900.0, 300.0);
    for _ in 0..600 {
        sim.step(1.0 / 60.0);
    }
    let stats = sim.get_perf_stats();
    assert_eq!(stats.steps(), 600);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.transitions() >= 1);
}
