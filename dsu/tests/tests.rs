use dsu::{DisjointSet, QuickFind, UnionFind};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn check_basic<U: DisjointSet>() {
    let mut set = U::with_len(10);
    assert_eq!(set.len(), 10);
    assert_eq!(set.count(), 10);
    assert!(!set.connected(1, 2));

    set.union(1, 2);
    set.union(3, 4);
    set.union(2, 4);
    assert_eq!(set.count(), 7);
    assert!(set.connected(1, 3));
    assert!(set.connected(4, 1));
    assert!(!set.connected(0, 1));
    assert_eq!(set.find(1), set.find(4));

    // merging the same component again changes nothing
    set.union(3, 1);
    assert_eq!(set.count(), 7);
}

#[test]
fn union_find_basic() {
    check_basic::<UnionFind>();
}

#[test]
fn quick_find_basic() {
    check_basic::<QuickFind>();
}

#[test]
fn empty() {
    let set = UnionFind::new(0);
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
}

#[test]
fn backends_agree() {
    const LEN: usize = 200;
    let mut rng = StdRng::seed_from_u64(17);
    let mut weighted = UnionFind::new(LEN);
    let mut eager = QuickFind::new(LEN);

    for _ in 0..300 {
        let p = rng.gen_range(0..LEN);
        let q = rng.gen_range(0..LEN);
        weighted.union(p, q);
        eager.union(p, q);
        assert_eq!(weighted.count(), eager.count());

        let a = rng.gen_range(0..LEN);
        let b = rng.gen_range(0..LEN);
        assert_eq!(weighted.connected(a, b), eager.connected(a, b));
    }
}

#[test]
#[should_panic]
fn out_of_range() {
    let mut set = UnionFind::new(3);
    set.find(3);
}

#[test]
#[should_panic]
fn union_out_of_range() {
    let mut set = QuickFind::new(3);
    set.union(0, 5);
}
