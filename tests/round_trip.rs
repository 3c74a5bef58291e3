use pcmtone::{BitDepth, Endianness, extend, full_scale, pack, unpack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ORDERS: [Endianness; 2] = [Endianness::Little, Endianness::Big];

fn all_depths() -> impl Iterator<Item = BitDepth> {
    (1..=64).map(|bits| BitDepth::new(bits).unwrap())
}

fn decode(bytes: &[u8], depth: BitDepth, order: Endianness) -> Vec<i64> {
    extend(&unpack(bytes, depth, order).unwrap(), depth)
}

#[test]
fn test_random_samples_survive_every_depth() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for depth in all_depths() {
        let samples: Vec<i64> = (0..256)
            .map(|_| rng.gen_range(depth.min_value()..=depth.max_value()))
            .collect();

        for order in ORDERS {
            let bytes = pack(&samples, depth, order);
            assert_eq!(bytes.len(), samples.len() * depth.bytes_per_sample());
            assert_eq!(decode(&bytes, depth, order), samples, "{depth} {order:?}");
        }
    }
}

#[test]
fn test_extremes_survive_every_depth() {
    for depth in all_depths() {
        let samples = [depth.min_value(), -1, 0, 1i64.min(depth.max_value()), depth.max_value()];
        for order in ORDERS {
            let bytes = pack(&samples, depth, order);
            assert_eq!(decode(&bytes, depth, order), samples, "{depth} {order:?}");
        }
    }
}

#[test]
fn test_byte_orders_mirror_each_other() {
    let mut rng = StdRng::seed_from_u64(7);

    for depth in all_depths() {
        let width = depth.bytes_per_sample();
        let samples: Vec<i64> = (0..16)
            .map(|_| rng.gen_range(depth.min_value()..=depth.max_value()))
            .collect();

        let little = pack(&samples, depth, Endianness::Little);
        let big = pack(&samples, depth, Endianness::Big);
        for (le, be) in little.chunks_exact(width).zip(big.chunks_exact(width)) {
            let reversed: Vec<u8> = be.iter().rev().copied().collect();
            assert_eq!(le, reversed.as_slice(), "{depth}");
        }
    }
}

#[test]
fn test_sign_extension_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    let raw: Vec<i64> = (0..512).map(|_| rng.r#gen::<i64>()).collect();

    for depth in all_depths() {
        let once = extend(&raw, depth);
        assert_eq!(extend(&once, depth), once, "{depth}");
        assert!(once.iter().all(|&s| depth.contains(s)), "{depth}");
    }
}

#[test]
fn test_full_scale_bounds_the_range() {
    for depth in all_depths() {
        let scale = full_scale(depth);
        assert_eq!(depth.min_value() as f64, -scale, "{depth}");
        assert!(depth.max_value() as f64 <= scale, "{depth}");
    }
}

#[test]
fn test_width_follows_bit_depth() {
    let cases = [(1, 1), (8, 1), (9, 2), (12, 2), (16, 2), (20, 3), (24, 3), (33, 5), (64, 8)];
    for (bits, bytes) in cases {
        let depth = BitDepth::new(bits).unwrap();
        assert_eq!(pack(&[0], depth, Endianness::Big).len(), bytes, "{bits} bits");
    }
}
