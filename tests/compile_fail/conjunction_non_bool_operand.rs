// Expected: the callables of this `Conjunction` composition cannot be evaluated with the arguments `(i32,)`

use closure_algebra::prelude::*;

fn main() {
    let successor = predicate(|value: i32| value + 1);
    let is_positive = predicate(|value: i32| value > 0);
    let both = successor * is_positive;
    let _ = both.invoke((1,));
}
