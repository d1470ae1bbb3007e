use ff::Field;

/// Inverts every element of `v` in place using Montgomery's trick.
///
/// Panics if any element is zero.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    let mut scratch_pad = Vec::with_capacity(v.len());
    batch_inverse_scratch_pad(v, &mut scratch_pad);
}

/// Same as [`batch_inverse`], reusing `scratchpad` for the running products.
///
/// One field inversion is performed for the whole slice, plus three
/// multiplications per element.
pub fn batch_inverse_scratch_pad<F: Field>(v: &mut [F], scratchpad: &mut Vec<F>) {
    if v.is_empty() {
        return;
    }

    scratchpad.clear();
    scratchpad.reserve(v.len());

    // scratchpad[i] = v[0] * ... * v[i]
    let mut acc = F::ONE;
    for f in v.iter() {
        acc *= f;
        scratchpad.push(acc);
    }

    let mut acc_inv = acc
        .invert()
        .expect("batch inversion input must not contain zero");

    // Walk backwards: at step i, acc_inv = (v[0] * ... * v[i])^-1
    for i in (0..v.len()).rev() {
        let prefix = if i == 0 { F::ONE } else { scratchpad[i - 1] };
        let next_acc_inv = acc_inv * v[i];
        v[i] = acc_inv * prefix;
        acc_inv = next_acc_inv;
    }
}
