//! pantrywatch main entrypoint.

use pantrywatch::run;

fn main() {
    if let Err(e) = run() {
        pantrywatch::ui::messages::error(format!("Error: {}", e));
        // 2 for bad user input, 1 for everything else
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
