// Expected: `{closure}` cannot be used as an operand of a `Pipe` composition

use closure_algebra::prelude::*;

fn main() {
    let increment = transform(|value: i32| value + 1);
    let _ = increment | (|value: i32| value * 2);
}
