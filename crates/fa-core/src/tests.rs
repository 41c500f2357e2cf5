//! Unit tests for fa-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BandId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(BandId(3) > BandId(2));
    }

    #[test]
    fn default_band_is_first() {
        assert_eq!(BandId::default(), BandId(0));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, Point};

    #[test]
    fn zero_distance() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn enclosing_box() {
        let bbox = BoundingBox::enclosing([
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bbox.min, Point::new(-2.0, -1.0));
        assert_eq!(bbox.max, Point::new(4.0, 5.0));
        assert!(bbox.contains(Point::new(0.0, 0.0)));
        assert!(!bbox.contains(Point::new(5.0, 0.0)));
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(BoundingBox::enclosing(Vec::<Point>::new()).is_none());
    }

    #[test]
    fn degenerate_box() {
        let line = BoundingBox::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        assert!(line.is_degenerate());
        let square = BoundingBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(!square.is_degenerate());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
    }

    #[test]
    fn interval_matching() {
        assert!(Tick(0).is_multiple_of(3));
        assert!(Tick(6).is_multiple_of(3));
        assert!(!Tick(7).is_multiple_of(3));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, BoundingBox, Point, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent households should diverge");
    }

    #[test]
    fn point_in_stays_in_box() {
        let bbox = BoundingBox::new(Point::new(-10.0, 100.0), Point::new(10.0, 120.0));
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..1000 {
            assert!(bbox.contains(rng.point_in(&bbox)));
        }
    }

    #[test]
    fn shuffle_is_seeded_permutation() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b: Vec<u32> = (0..50).collect();
        SimRng::new(9).shuffle(&mut a);
        SimRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn child_streams_are_reproducible() {
        let mut root1 = SimRng::new(5);
        let mut root2 = SimRng::new(5);
        let x: u64 = root1.child(1).random();
        let y: u64 = root2.child(1).random();
        assert_eq!(x, y);
    }
}
