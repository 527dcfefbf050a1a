//! campus360 main entrypoint.

use campus360::run;
use campus360::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
