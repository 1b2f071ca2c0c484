//! Ball-ball collision pass
//!
//! Brute-force over unordered pairs in list order. The ball count is the
//! palette size, so no broad phase is needed. Results depend on pair order.

use rand::Rng;

use super::ball::Ball;

/// Mutable borrows of two distinct balls in the arena (`i < j`)
pub fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    assert!(i < j, "pair_mut needs i < j, got ({i}, {j})");
    let (head, tail) = balls.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Resolve every overlapping pair once. Returns the number of contacts.
pub fn resolve_collisions<R: Rng + ?Sized>(balls: &mut [Ball], rng: &mut R) -> usize {
    let mut contacts = 0;
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (a, b) = pair_mut(balls, i, j);
            if a.intersects(b) {
                a.resolve_collision(b, rng);
                contacts += 1;
            }
        }
    }
    contacts
}
