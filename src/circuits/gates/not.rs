use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Not;

impl GateImpl for Not {
    fn display_name() -> &'static str {
        "NOT gate"
    }

    fn label() -> &'static str {
        "NOT"
    }

    fn input_count() -> usize {
        1
    }

    fn init_state() -> bool {
        false
    }

    fn fold(state: &mut bool, input: bool) -> GateOutput {
        *state = !input;
        GateOutput {
            out: *state,
            fin: false,
        }
    }

    fn evaluate(inputs: &[bool]) -> bool {
        match inputs {
            [input] => {
                let mut state = Self::init_state();
                Self::fold(&mut state, *input).out
            }
            _ => false,
        }
    }
}
