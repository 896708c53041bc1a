//! src/local_search.rs
//!
//! Lokale zoektocht "voeg één toe, verwijder er zoveel mogelijk": label een
//! extra knoop `i` en laat de purge (met `i` uitgesloten) opruimen wat dankzij
//! `i` overbodig is geworden. First-improvement: de eerste knoop die de kost
//! strikt verlaagt wordt behouden. O(V * R^3) per aanroep.

use crate::purge::purge;
use crate::solution::Solution;
use rand::Rng;

/// Probeert de ongelabelde knopen in indexvolgorde. Geeft `true` terug als
/// een verbetering gevonden (en behouden) is; anders blijft `solution` ongewijzigd.
pub fn improve<R>(solution: &mut Solution<'_>, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let backup = solution.clone();
    let n = solution.graph().n();

    for i in 0..n {
        if solution.is_labeled(i) {
            continue;
        }
        solution.label(i);
        purge(solution, &[i], rng);
        if solution.cost() < backup.cost() {
            return true;
        }
        solution.copy_from(&backup);
    }
    false
}

/// Herhaalt `improve` zolang het iets oplevert. Geeft het aantal verbeteringen terug.
pub fn improve_until_stable<R>(solution: &mut Solution<'_>, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let mut rounds = 0usize;
    while improve(solution, rng) {
        rounds += 1;
    }
    rounds
}
