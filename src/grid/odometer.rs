/// Mixed-radix counter over the lattice `{0..=zones}^N`.
///
/// Visits every index vector exactly once in a fixed order: the last
/// dimension increments fastest, carrying leftward on overflow, from
/// `[0, .., 0]` through `[zones, .., zones]`. The order is what makes
/// tie-breaking reproducible, and the explicit counter generalizes to any
/// `N` without nesting loops per dimension.
#[derive(Debug, Clone)]
pub(super) struct Odometer<const N: usize> {
    state: [usize; N],
    zones: usize,
    done: bool,
}

impl<const N: usize> Odometer<N> {
    pub(super) fn new(zones: usize) -> Self {
        Self {
            state: [0; N],
            zones,
            done: false,
        }
    }
}

impl<const N: usize> Iterator for Odometer<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<[usize; N]> {
        if self.done {
            return None;
        }
        let current = self.state;

        // Advance: bump the rightmost digit that has room, zeroing
        // everything after it. No such digit means the count is complete.
        let mut dim = N;
        loop {
            if dim == 0 {
                self.done = true;
                break;
            }
            dim -= 1;
            if self.state[dim] < self.zones {
                self.state[dim] += 1;
                for later in &mut self.state[dim + 1..] {
                    *later = 0;
                }
                break;
            }
        }

        Some(current)
    }
}
