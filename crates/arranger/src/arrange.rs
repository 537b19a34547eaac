use crate::{
    compare::compare,
    direction::{Direction, select_direction},
    error::{ArrangeError, Result},
    geometry::{Item, ItemId, Parent},
    host::{ItemSource, MutationSink},
    sort::stable_sort_by,
};
use log::{debug, info};

/// Target order for one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOrder {
    pub parent: Parent,
    pub order: Vec<ItemId>,
}

/// Every order an arrangement will commit: containers first, root last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangePlan {
    pub orders: Vec<PlannedOrder>,
}

impl ArrangePlan {
    /// Number of `move_to_end` calls needed to commit the plan
    pub fn moves(&self) -> usize {
        self.orders.iter().map(|o| o.order.len()).sum()
    }
}

/// Result of a completed arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangeSummary {
    pub direction: Direction,
    /// Collections whose order was committed (root included)
    pub collections: usize,
    pub moves: usize,
}

/// Sorts one collection. Input order breaks ties.
pub fn sort_items(items: &[Item], direction: Direction) -> Vec<&Item> {
    stable_sort_by(items.iter().collect(), |a, b| {
        compare(direction, &a.bounds, &b.bounds)
    })
}

/// Computes the target order of the root and of each top-level container.
///
/// Children of containers are sorted among themselves; anything deeper is left alone.
pub fn plan(root: &[Item], direction: Direction) -> ArrangePlan {
    let mut orders: Vec<PlannedOrder> = root
        .iter()
        .filter(|item| item.is_container() && !item.children.is_empty())
        .map(|container| PlannedOrder {
            parent: Parent::Container(container.id.clone()),
            order: ids(sort_items(&container.children, direction)),
        })
        .collect();

    if !root.is_empty() {
        orders.push(PlannedOrder {
            parent: Parent::Root,
            order: ids(sort_items(root, direction)),
        });
    }

    ArrangePlan { orders }
}

/// Applies a plan through the sink's move-to-end primitive.
///
/// Each collection is walked from its last planned item to its first, moving every
/// item to the end of its parent. Stops at the first refused move; moves already
/// made are not rolled back.
pub fn commit<S: MutationSink>(plan: &ArrangePlan, sink: &mut S) -> Result<usize> {
    let mut moves = 0;
    for planned in &plan.orders {
        for item in planned.order.iter().rev() {
            sink.move_to_end(item, &planned.parent)
                .map_err(|e| ArrangeError::MutationFailure {
                    item: item.clone(),
                    parent: planned.parent.clone(),
                    source: Box::new(e),
                })?;
            moves += 1;
        }
        debug!(
            "Reordered {} ({} items): {}",
            planned.parent,
            planned.order.len(),
            join_ids(&planned.order)
        );
    }
    Ok(moves)
}

/// Arranges a snapshot of the root collection, committing through `sink`
pub fn arrange<S: MutationSink>(
    root: &[Item],
    sink: &mut S,
    direction: Direction,
) -> Result<ArrangeSummary> {
    if root.is_empty() {
        info!("Nothing to arrange");
        return Ok(ArrangeSummary {
            direction,
            collections: 0,
            moves: 0,
        });
    }

    let plan = plan(root, direction);
    debug!("Planned {} moves", plan.moves());
    let moves = commit(&plan, sink)?;
    info!(
        "Arranged {} top-level items {direction} ({} collections, {moves} moves)",
        root.len(),
        plan.orders.len()
    );

    Ok(ArrangeSummary {
        direction,
        collections: plan.orders.len(),
        moves,
    })
}

/// Snapshots `host` and arranges it in place
pub fn arrange_host<H>(host: &mut H, direction: Direction) -> Result<ArrangeSummary>
where
    H: ItemSource + MutationSink,
{
    let snapshot = host.root_items();
    arrange(&snapshot, host, direction)
}

/// Dispatcher entry point: selects the direction named by `command`, then arranges.
/// An unknown command fails before the host is read or mutated.
pub fn run_command<H>(command: &str, host: &mut H) -> Result<ArrangeSummary>
where
    H: ItemSource + MutationSink,
{
    let direction = select_direction(command)?;
    arrange_host(host, direction)
}

fn ids(items: Vec<&Item>) -> Vec<ItemId> {
    items.into_iter().map(|item| item.id.clone()).collect()
}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
