use salsarng::rng::salsa::{Salsa, Seed, State};
use salsarng::rng::{GaussianState, GenState, RandomGen};

/// Test sampler that, like a Gaussian sampler, produces two values per
/// draw and parks the second one in the generator state.
struct PairSampler<'a, G: RandomGen + ?Sized> {
    generator: &'a mut G,
}

impl<'a, G: RandomGen + ?Sized> PairSampler<'a, G> {
    fn new(generator: &'a mut G) -> Self {
        Self { generator }
    }

    fn next(&mut self) -> f64 {
        if let Some(v) = self.generator.state_mut().gaussian_mut().deviate.take() {
            return v;
        }

        let x = self.generator.next_u64();
        let scale = (1u64 << 32) as f64;
        self.generator.state_mut().gaussian_mut().deviate = Some((x as u32) as f64 / scale);

        (x >> 32) as f64 / scale
    }
}

fn draw_all(generator: &mut dyn RandomGen<State = State>, count: usize) -> Vec<u64> {
    (0..count).map(|_| generator.next_u64()).collect()
}

#[test]
fn new_generator_has_empty_gaussian_slot() {
    let rng = Salsa::from_seed(&Seed([3; 10]));

    assert_eq!(*rng.state().gaussian(), GaussianState::default());
    assert_eq!(rng.state().gaussian().deviate, None);
}

#[test]
fn trait_object_matches_concrete_calls() {
    let mut concrete = Salsa::from_seed(&Seed([4; 10]));
    let mut dynamic = Salsa::from_seed(&Seed([4; 10]));

    let expected: Vec<u64> = (0..32).map(|_| concrete.next_u64()).collect();

    assert_eq!(draw_all(&mut dynamic, 32), expected);
}

#[test]
fn boxed_generator_is_a_generator() {
    let mut boxed: Box<dyn RandomGen<State = State>> = Box::new(Salsa::from_seed(&Seed([5; 10])));
    let mut concrete = Salsa::from_seed(&Seed([5; 10]));

    assert_eq!(RandomGen::next_u64(&mut boxed), concrete.next_u64());
}

#[test]
fn sampler_uses_cached_value_before_drawing() {
    let mut rng = Salsa::from_seed(&Seed([6; 10]));
    let counter = rng.state().block_counter();
    let cursor = rng.state().cursor();

    let mut sampler = PairSampler::new(&mut rng);
    sampler.next();
    sampler.next();

    // Two samples, one 64-bit draw
    assert_eq!(rng.state().block_counter(), counter);
    assert_eq!(rng.state().cursor(), cursor + 8);
}

#[test]
fn checkpoint_restores_sampler_cache() {
    let mut rng = Salsa::from_seed(&Seed([7; 10]));

    PairSampler::new(&mut rng).next();
    assert!(rng.state().gaussian().deviate.is_some());

    let saved = RandomGen::state(&rng).clone();
    let expected: Vec<f64> = {
        let mut sampler = PairSampler::new(&mut rng);
        (0..9).map(|_| sampler.next()).collect()
    };

    RandomGen::set_state(&mut rng, saved);
    let mut sampler = PairSampler::new(&mut rng);
    let replayed: Vec<f64> = (0..9).map(|_| sampler.next()).collect();

    assert_eq!(replayed, expected);
}

#[test]
fn sampler_accepts_trait_objects() {
    let mut a = Salsa::from_seed(&Seed([8; 10]));
    let mut b = Salsa::from_seed(&Seed([8; 10]));

    let dynamic: &mut dyn RandomGen<State = State> = &mut a;
    let xs: Vec<f64> = {
        let mut sampler = PairSampler::new(dynamic);
        (0..4).map(|_| sampler.next()).collect()
    };
    let ys: Vec<f64> = {
        let mut sampler = PairSampler::new(&mut b);
        (0..4).map(|_| sampler.next()).collect()
    };

    assert_eq!(xs, ys);
    assert!(xs.iter().all(|v| (0.0..1.0).contains(v)));
}

#[cfg(feature = "rand_core")]
#[test]
fn rand_core_adapter_shares_the_keystream() {
    use rand_core::RngCore;
    use salsarng::rng::salsa::{Iv, Key};

    let key = Key::from_bytes(&[0x21; 32]);

    let mut filled = [0u8; 100];
    RngCore::fill_bytes(&mut Salsa::from_key_iv(&key, &Iv::default()), &mut filled);

    let mut keystream = [0u8; 100];
    Salsa::from_key_iv(&key, &Iv::default()).apply_keystream(&mut keystream);
    assert_eq!(filled, keystream);

    let mut a = Salsa::from_seed(&Seed([9; 10]));
    let mut b = Salsa::from_seed(&Seed([9; 10]));
    assert_eq!(RngCore::next_u32(&mut a), b.next_u64() as u32);
    assert_eq!(RngCore::next_u64(&mut a), b.next_u64());
}
