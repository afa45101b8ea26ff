//! Plain-text rendering of a bridge plan.

use bridge_core::BridgePlan;

/// One row per waypoint, grouped by drone label.
pub fn render_table(plan: &BridgePlan) -> String {
    let mut out = String::new();
    if plan.is_empty() {
        out.push_str("No relays needed.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<10} {:>4} {:>10} {:>10} {:>10} {:>8}\n",
        "drone", "step", "x", "y", "z", "yaw"
    ));
    for (label, trajectory) in plan {
        for (index, step) in trajectory.iter().enumerate() {
            out.push_str(&format!(
                "{:<10} {:>4} {:>10.3} {:>10.3} {:>10.3} {:>8.2}\n",
                label, index, step.x, step.y, step.z, step.yaw
            ));
        }
    }
    out
}
