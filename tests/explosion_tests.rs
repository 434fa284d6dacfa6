use rand::SeedableRng;
use rand::rngs::StdRng;

use xtmines::xtm_explode::explosion_frames;

#[test]
fn single_cell_blast_fades_out() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let frames = explosion_frames(1, 1, 0, 0, &mut rng);
        assert!(!frames.is_empty());
        assert!(frames.len() <= 150);
        let last = frames.last().unwrap();
        assert!(last.is_blank(), "seed {}", seed);
        assert_eq!((last.rows(), last.cols()), (1, 1));
        // only the final frame is blank
        assert!(frames[..frames.len() - 1].iter().all(|f| !f.is_blank()));
    }
}

#[test]
fn corner_blast_on_an_expert_board_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    // 16 rows of 30 cells, three characters each
    let frames = explosion_frames(16, 90, 15, 88, &mut rng);
    assert!(!frames.is_empty());
    assert!(frames.len() <= 150);
    for f in &frames {
        assert_eq!((f.rows(), f.cols()), (16, 90));
        for r in 0..16 {
            assert_eq!(f.row(r).len(), 90);
        }
    }
}

#[test]
fn same_seed_same_blast() {
    let a = explosion_frames(4, 24, 1, 10, &mut StdRng::seed_from_u64(9));
    let b = explosion_frames(4, 24, 1, 10, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.len(), b.len());
    for (fa, fb) in a.iter().zip(&b) {
        for r in 0..4 {
            assert_eq!(fa.row(r), fb.row(r));
        }
    }
}
