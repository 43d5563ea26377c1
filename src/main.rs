//! farmevent main entrypoint.

use farmevent::run;
use farmevent::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
