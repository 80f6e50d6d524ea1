use block_pseudorand::block_rand;
use rayon::prelude::*;

/// Random keys, with the first half shifted right and the second half shifted left by `shift`
/// bits so that both the low and the high digits end up with crowded buckets.
pub fn gen_inputs(n: usize, shift: u32) -> Vec<u32> {
    let mut inputs: Vec<u32> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_input_set(shift: u32) -> Vec<Vec<u32>> {
    let n = 2_000_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 1)..(half + 1)].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 64)..(half + 64)].to_vec(),
        inputs[(half - 64)..(half + 65)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs[(half - 250_000)..(half + 250_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

pub fn validate_sort<F>(mut inputs: Vec<u32>, sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    let mut expected = inputs.clone();

    sort_fn(&mut inputs);
    expected.sort_unstable();

    assert_eq!(inputs, expected);
}

pub fn sort_comparison_suite<F>(shift: u32, sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    for s in gen_input_set(shift) {
        validate_sort(s, &sort_fn);
    }
}

/// Masks that empty out whole digits, single bits, or alternate bits.
const PATTERN_MASKS: [u32; 13] = [
    0xFFFF_FFFF,
    0xFFFF_FF00,
    0xFFFF_00FF,
    0xFF00_FFFF,
    0x00FF_FFFF,
    0x0000_FFFF,
    0xFFFF_0000,
    0x0000_00FF,
    0b10000000000000000000000000000000,
    0b00000000000000000000000000000001,
    0b11111111111111111111111111111110,
    0b10101010101010101010101010101010,
    0b01010101010101010101010101010101,
];

pub fn validate_u32_patterns<F>(sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    let input_sets: Vec<Vec<u32>> = vec![
        vec![u32::MAX; 128],
        vec![0; 1_000],
        block_rand(4),
        block_rand(128),
        block_rand(129),
        block_rand(128_000),
        (0..70_000u32).collect(),
        (0..70_000u32).rev().collect(),
    ];

    for inputs in input_sets.iter() {
        for mask in PATTERN_MASKS {
            validate_sort(inputs.iter().map(|v| *v & mask).collect(), &sort_fn);
        }
    }
}
