use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct And;

impl GateImpl for And {
    fn display_name() -> &'static str {
        "AND gate"
    }

    fn label() -> &'static str {
        "AND"
    }

    fn init_state() -> bool {
        true
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        GateOutput {
            out: input,
            fin: !input,
        }
    }
}
