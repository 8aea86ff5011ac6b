use super::{GateImpl, GateOutput, Xor};

#[derive(Clone)]
pub struct Xnor;

impl GateImpl for Xnor {
    fn display_name() -> &'static str {
        "XNOR gate"
    }

    fn label() -> &'static str {
        "XNOR"
    }

    fn init_state() -> bool {
        true
    }

    fn fold(state: &mut bool, input: bool) -> GateOutput {
        Xor::fold(state, input)
    }

    fn evaluate(inputs: &[bool]) -> bool {
        if inputs.len() != Self::input_count() {
            return false;
        }

        let mut state = Self::init_state();
        let mut out = state;
        for &input in inputs {
            out = Self::fold(&mut state, input).out;
        }
        out
    }
}
