//! sleepcalc main entrypoint.

use sleepcalc::run;
use sleepcalc::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
