use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Xor;

impl GateImpl for Xor {
    fn display_name() -> &'static str {
        "XOR gate"
    }

    fn label() -> &'static str {
        "XOR"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(state: &mut bool, input: bool) -> GateOutput {
        if input {
            *state = !*state;
        }

        GateOutput {
            out: *state,
            fin: false,
        }
    }

    // Parity only for exactly two inputs, anything else is off.
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
