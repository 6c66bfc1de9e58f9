use rand::{
    Rng,
    SeedableRng,
    distributions::Standard,
    prelude::Distribution,
    rngs::StdRng,
};

use crate::gaussian::{
    cloud::SplatCloud,
    splat::Splat,
};


impl Distribution<Splat> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Splat {
        let mut motion = [0.0; 9];
        for coefficient in motion.iter_mut() {
            *coefficient = rng.gen_range(-0.5..0.5);
        }

        Splat {
            position: [
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            ],
            rotation: [
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ],
            log_scale: [
                rng.gen_range(-6.0..0.0),
                rng.gen_range(-6.0..0.0),
                rng.gen_range(-6.0..0.0),
            ],
            logit_opacity: rng.gen_range(-4.0..4.0),
            color_dc: [
                rng.gen_range(-0.2..1.2),
                rng.gen_range(-0.2..1.2),
                rng.gen_range(-0.2..1.2),
            ],
            motion,
            omega: [
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
            ],
            trbf_center: rng.gen_range(0.0..1.0),
            log_trbf_scale: rng.gen_range(-2.0..0.0),
        }
    }
}

pub fn random_splats(n: usize) -> SplatCloud {
    sample_splats(&mut rand::thread_rng(), n)
}

pub fn random_splats_seeded(n: usize, seed: u64) -> SplatCloud {
    sample_splats(&mut StdRng::seed_from_u64(seed), n)
}

fn sample_splats<R: Rng>(rng: &mut R, n: usize) -> SplatCloud {
    (0..n)
        .map(|_| rng.sample::<Splat, _>(Standard))
        .collect()
}
