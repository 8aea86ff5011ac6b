use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Nor;

impl GateImpl for Nor {
    fn display_name() -> &'static str {
        "NOR gate"
    }

    fn label() -> &'static str {
        "NOR"
    }

    fn init_state() -> bool {
        true
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        if input {
            GateOutput {
                out: false,
                fin: true,
            }
        } else {
            GateOutput {
                out: true,
                fin: false,
            }
        }
    }
}
