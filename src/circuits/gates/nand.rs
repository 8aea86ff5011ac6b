use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Nand;

impl GateImpl for Nand {
    fn display_name() -> &'static str {
        "NAND gate"
    }

    fn label() -> &'static str {
        "NAND"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        if !input {
            GateOutput {
                out: true,
                fin: true,
            }
        } else {
            GateOutput {
                out: false,
                fin: false,
            }
        }
    }
}
