// Expected: `TransformCaps` does not enable the negation operator

use closure_algebra::prelude::*;

fn main() {
    let nonzero = transform(|value: i32| value != 0);
    let _ = !nonzero;
}
