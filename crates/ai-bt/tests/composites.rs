use ai_bt::{BtNode, BtStatus, Selector, Sequence};
use ai_core::{TickContext, WorldMut, WorldView};

#[derive(Default)]
struct World;

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

/// Indices of the children ticked during one evaluation.
type Visits = Vec<usize>;

struct Fixed {
    index: usize,
    status: BtStatus,
}

impl BtNode<World, Visits> for Fixed {
    fn tick(
        &mut self,
        _ctx: &TickContext,
        _agent: u64,
        _world: &mut World,
        visits: &mut Visits,
    ) -> BtStatus {
        visits.push(self.index);
        self.status
    }
}

const ALL: [BtStatus; 3] = [BtStatus::Success, BtStatus::Failure, BtStatus::Running];

fn ctx() -> TickContext {
    TickContext::fixed_step(0, 0.1)
}

fn children(statuses: &[BtStatus]) -> Vec<Box<dyn BtNode<World, Visits>>> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, &status)| {
            Box::new(Fixed { index, status }) as Box<dyn BtNode<World, Visits>>
        })
        .collect()
}

/// Every status vector of length `n`, in lexicographic order over `ALL`.
fn combinations(n: usize) -> Vec<Vec<BtStatus>> {
    let mut out = vec![Vec::new()];
    for _ in 0..n {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                ALL.into_iter().map(move |s| {
                    let mut next = prefix.clone();
                    next.push(s);
                    next
                })
            })
            .collect();
    }
    out
}

fn run(node: &mut dyn BtNode<World, Visits>) -> (BtStatus, Visits) {
    let mut world = World;
    let mut visits = Visits::new();
    let status = node.tick(&ctx(), 1, &mut world, &mut visits);
    (status, visits)
}

#[test]
fn empty_sequence_succeeds_and_empty_selector_fails() {
    let mut seq = Sequence::<World, Visits>::new(Vec::new());
    let mut sel = Selector::<World, Visits>::new(Vec::new());

    assert_eq!(run(&mut seq), (BtStatus::Success, vec![]));
    assert_eq!(run(&mut sel), (BtStatus::Failure, vec![]));
}

#[test]
fn sequence_returns_first_non_success_for_every_combination() {
    for n in 1..=4 {
        assert_eq!(combinations(n).len(), 3usize.pow(n as u32));
        for statuses in combinations(n) {
            let mut seq = Sequence::new(children(&statuses));
            let (status, visits) = run(&mut seq);

            let stop = statuses.iter().position(|s| *s != BtStatus::Success);
            let expected = stop.map_or(BtStatus::Success, |i| statuses[i]);
            let visited = stop.map_or(statuses.len(), |i| i + 1);

            assert_eq!(status, expected, "sequence over {statuses:?}");
            assert_eq!(visits, (0..visited).collect::<Vec<_>>(), "visits over {statuses:?}");
        }
    }
}

#[test]
fn selector_returns_first_non_failure_for_every_combination() {
    for n in 1..=4 {
        for statuses in combinations(n) {
            let mut sel = Selector::new(children(&statuses));
            let (status, visits) = run(&mut sel);

            let stop = statuses.iter().position(|s| *s != BtStatus::Failure);
            let expected = stop.map_or(BtStatus::Failure, |i| statuses[i]);
            let visited = stop.map_or(statuses.len(), |i| i + 1);

            assert_eq!(status, expected, "selector over {statuses:?}");
            assert_eq!(visits, (0..visited).collect::<Vec<_>>(), "visits over {statuses:?}");
        }
    }
}

#[test]
fn selector_priority_is_insertion_order() {
    let mut sel = Selector::new(children(&[
        BtStatus::Failure,
        BtStatus::Running,
        BtStatus::Success,
    ]));

    // The running child outranks the later succeeding one.
    assert_eq!(run(&mut sel), (BtStatus::Running, vec![0, 1]));
}

#[test]
fn composites_are_reentrant_across_ticks() {
    let mut seq = Sequence::new(children(&[BtStatus::Success, BtStatus::Running]));

    for _ in 0..3 {
        assert_eq!(run(&mut seq), (BtStatus::Running, vec![0, 1]));
    }
}
