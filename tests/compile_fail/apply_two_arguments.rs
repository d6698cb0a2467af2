// Expected: the invocation policy `ApplyPolicy` cannot accept the arguments `(i32, i32)`

use closure_algebra::prelude::*;

fn main() {
    let sum = apply(|lhs: i32, rhs: i32| lhs + rhs);
    let _ = sum.invoke((1, 2));
}
