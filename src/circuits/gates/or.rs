use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Or;

impl GateImpl for Or {
    fn display_name() -> &'static str {
        "OR gate"
    }

    fn label() -> &'static str {
        "OR"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        GateOutput {
            out: input,
            fin: input,
        }
    }
}
