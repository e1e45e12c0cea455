//! Portfolio FX core crate.
//!
//! Canvas and DOM effects for a single-page portfolio: a drifting particle
//! network behind the hero, an orbiting skills cloud with category filters and
//! hover tooltips, a fake terminal session, and scroll-driven page chrome.
//!
//! The simulations in [`scene`] and the step machines in [`terminal`] and
//! [`page`] are plain Rust and run natively under `cargo test`; only the `web`
//! module talks to the browser. JS calls [`start_portfolio`] once the DOM is ready.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod page;
pub mod rng;
pub mod scene;
pub mod terminal;
mod web;

pub use config::FxConfig;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Built-in page content
// -----------------------------------------------------------------------------

/// Skill roster: (name, category, proficiency 0-100, years, color).
pub const SKILLS: &[(&str, &str, u8, u8, &str)] = &[
    ("AWS", "cloud", 95, 5, "#FF9900"),
    ("GCP", "cloud", 85, 3, "#4285F4"),
    ("Azure", "cloud", 75, 2, "#0078D4"),
    ("Kubernetes", "container", 93, 4, "#326CE5"),
    ("Docker", "container", 95, 5, "#2496ED"),
    ("Terraform", "devops", 95, 5, "#7B42BC"),
    ("Ansible", "devops", 90, 4, "#EE0000"),
    ("Jenkins", "devops", 92, 5, "#D24939"),
    ("GitLab CI", "devops", 88, 4, "#FC6D26"),
    ("Prometheus", "monitoring", 92, 4, "#E6522C"),
    ("Grafana", "monitoring", 90, 4, "#F46800"),
    ("Python", "devops", 90, 5, "#3776AB"),
    ("Bash", "devops", 92, 5, "#4EAA25"),
    ("EKS", "container", 90, 4, "#FF9900"),
    ("Helm", "container", 85, 3, "#0F1689"),
    ("Airflow", "devops", 82, 2, "#017CEE"),
    ("Vault", "security", 88, 3, "#000000"),
];

/// Terminal script: (command, newline separated output).
pub const TERMINAL_SCRIPT: &[(&str, &str)] = &[
    (
        "whoami",
        "Lead DevOps Engineer | Cloud Architect | Platform Engineer",
    ),
    (
        "cat profile.txt",
        "5+ years building cloud-native infrastructure\n\
         Specializing in AWS, GCP, Kubernetes, Terraform\n\
         Passionate about automation and DevSecOps",
    ),
    (
        "ls -la skills/",
        "drwxr-xr-x  kubernetes/\n\
         drwxr-xr-x  terraform/\n\
         drwxr-xr-x  aws/\n\
         drwxr-xr-x  docker/\n\
         drwxr-xr-x  python/",
    ),
    (
        "docker ps",
        "CONTAINER ID   STATUS    PORTS\n\
         f5a3b2c1       Up 5min   0.0.0.0:80->80\n\
         e2d4a1f6       Up 10min  0.0.0.0:443->443",
    ),
    (
        "kubectl get pods",
        "NAME                    READY   STATUS\n\
         app-deployment-1        1/1     Running\n\
         app-deployment-2        1/1     Running\n\
         app-deployment-3        1/1     Running",
    ),
    ("terraform plan", "Plan: 15 to add, 0 to change, 0 to destroy"),
];

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    web::start(FxConfig::default())
}

/// Same as [`start_portfolio`] with a JSON config; omitted fields keep their
/// defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    let config = FxConfig::from_json(json).map_err(|e| {
        let msg = format!("bad portfolio config: {e}");
        web::warn(&msg);
        JsValue::from_str(&msg)
    })?;
    web::start(config)
}
