use std::path::Path;
use objcull::session::RemovalReport;

pub(crate) fn print_summary(path: &Path, report: &RemovalReport, verified: Option<bool>) {
    println!("\n=== Removal Summary ===");
    println!("Vertices: {} -> {} ({} removed)",
             report.positions_before,
             report.positions_after,
             report.positions_before - report.positions_after);
    println!("Faces: {} -> {} ({} dropped)",
             report.faces_before,
             report.faces_after,
             report.faces_before - report.faces_after);
    println!("Saved to: {}", path.display());
    match verified {
        Some(true) => println!("Verification: saved file matches the edited model"),
        Some(false) => println!("Verification: saved file differs from the edited model"),
        None => {}
    }
}
