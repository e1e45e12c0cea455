// Integration tests (native) for the `portfolio-fx` crate.
// These drive the scenes through `AnimationHost` with a recording surface, so
// they run under `cargo test` on the host.

use std::f64::consts::TAU;

use portfolio_fx::config::{NetworkConfig, OrbitConfig};
use portfolio_fx::rng::FxRng;
use portfolio_fx::scene::{
    AnimationHost, DrawOp, Filter, OrbitCloud, Particle, ParticleField, RecordingSurface, Scene,
};
use portfolio_fx::terminal::TerminalTyper;
use portfolio_fx::FxConfig;

fn at_rest(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        radius: 2.0,
    }
}

#[test]
fn two_particles_one_frame_one_line() {
    let cfg = NetworkConfig {
        node_count: 2,
        max_distance: 1000.0,
        ..NetworkConfig::default()
    };
    let line_opacity = cfg.line_opacity;
    let mut field = ParticleField::new(cfg, 800.0, 600.0, FxRng::seeded(11));
    field.set_particles(vec![at_rest(0.0, 0.0), at_rest(10.0, 0.0)]);

    let mut host = AnimationHost::new(field, RecordingSurface::new());
    host.frame();

    let lines: Vec<&DrawOp> = host.surface().lines().collect();
    assert_eq!(lines.len(), 1);
    match lines[0] {
        DrawOp::Line { from, to, color, .. } => {
            assert_eq!((*from, *to), ((0.0, 0.0), (10.0, 0.0)));
            let expected = (1.0 - 10.0 / 1000.0) * line_opacity;
            assert!((color.a - expected).abs() < 1e-12);
        }
        _ => unreachable!(),
    }
    assert_eq!(host.surface().circles().count(), 2);
}

#[test]
fn particle_count_and_bounds_hold_for_many_sizes() {
    for (n, seed) in [(0usize, 1u64), (1, 2), (50, 3), (200, 4)] {
        let cfg = NetworkConfig {
            node_count: n,
            ..NetworkConfig::default()
        };
        let field = ParticleField::new(cfg, 640.0, 360.0, FxRng::seeded(seed));
        assert_eq!(field.particles().len(), n);
        assert!(field
            .particles()
            .iter()
            .all(|p| (0.0..=640.0).contains(&p.x) && (0.0..=360.0).contains(&p.y)));
    }
}

#[test]
fn particles_stay_finite_and_near_bounds_over_many_frames() {
    let field = ParticleField::new(NetworkConfig::default(), 300.0, 200.0, FxRng::seeded(21));
    let mut host = AnimationHost::new(field, RecordingSurface::new());
    host.scene_mut().set_pointer(Some((150.0, 100.0)));
    for _ in 0..2000 {
        host.frame();
        host.surface_mut().reset();
    }
    assert_eq!(host.frames(), 2000);
    for p in host.scene().particles() {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.x > -5.0 && p.x < 305.0, "x drifted to {}", p.x);
        assert!(p.y > -5.0 && p.y < 205.0, "y drifted to {}", p.y);
    }
}

#[test]
fn orbit_nodes_start_on_circle_for_default_roster() {
    let cfg = FxConfig::default();
    let n = cfg.skills.len();
    let cloud = OrbitCloud::new(cfg.orbit, cfg.skills, 900.0, 500.0);
    let r = 500.0 * 0.3;
    for (i, node) in cloud.nodes().iter().enumerate() {
        let angle = TAU * i as f64 / n as f64;
        assert!((node.x - (450.0 + angle.cos() * r)).abs() < 1e-9);
        assert!((node.y - (250.0 + angle.sin() * r)).abs() < 1e-9);
        assert!((node.orbit_radius() - r).abs() < 1e-12);
    }
}

#[test]
fn filter_then_all_restores_everything() {
    let cfg = FxConfig::default();
    let mut cloud = OrbitCloud::new(cfg.orbit, cfg.skills, 900.0, 500.0);
    cloud.set_filter(Filter::parse("monitoring"));
    for node in cloud.nodes() {
        assert_eq!(node.visible(), node.category() == "monitoring", "{}", node.name());
    }
    cloud.set_filter(Filter::parse("all"));
    assert!(cloud.nodes().iter().all(|n| n.visible()));
}

#[test]
fn filtered_cloud_draws_only_visible_labels() {
    let cfg = FxConfig::default();
    let cloud = OrbitCloud::new(cfg.orbit, cfg.skills, 900.0, 500.0);
    let mut host = AnimationHost::new(cloud, RecordingSurface::new());
    host.scene_mut().set_filter(Filter::parse("cloud"));
    host.frame();
    let labels: Vec<String> = host
        .surface()
        .texts()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["AWS", "GCP", "Azure"]);
}

#[test]
fn orbit_keeps_turning_and_settles_near_target() {
    let cloud = OrbitCloud::new(OrbitConfig::default(), FxConfig::default().skills, 800.0, 800.0);
    let start: Vec<f64> = cloud.nodes().iter().map(|n| n.angle).collect();
    let mut host = AnimationHost::new(cloud, RecordingSurface::new());
    for _ in 0..600 {
        host.frame();
        host.surface_mut().reset();
    }
    for (node, a0) in host.scene().nodes().iter().zip(start) {
        assert!((node.angle - (a0 + 0.6)).abs() < 1e-9);
        let lag = ((node.x - node.target_x).powi(2) + (node.y - node.target_y).powi(2)).sqrt();
        assert!(lag < 5.0, "{} lags its target by {}", node.name(), lag);
    }
}

#[test]
fn resize_swaps_whole_node_set() {
    let cfg = FxConfig::default();
    let mut cloud = OrbitCloud::new(cfg.orbit, cfg.skills, 900.0, 500.0);
    let before = cloud.nodes().len();
    cloud.resize(300.0, 300.0);
    assert_eq!(cloud.nodes().len(), before);
    assert!((cloud.nodes()[0].x - (150.0 + 90.0)).abs() < 1e-9);
}

#[test]
fn default_terminal_script_types_first_command() {
    let mut typer = TerminalTyper::new(FxConfig::default().terminal);
    typer.next_step();
    let typed: Vec<String> = (0..7).map(|_| typer.next_step().command).collect();
    assert_eq!(typed.last().map(String::as_str), Some("whoami"));
    let output = typer.next_step();
    assert_eq!(
        output.output,
        vec!["Lead DevOps Engineer | Cloud Architect | Platform Engineer"]
    );
}
