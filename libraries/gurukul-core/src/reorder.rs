//! Pairwise reorder planning for playlist content
//!
//! Moving an item one step up or down swaps it with its neighbour. The
//! backend has no atomic swap, so a move is expressed as two absolute
//! order assignments, one per affected item. Planning is separated from
//! execution: this module computes the assignments from the list as
//! currently rendered, and the API client issues them.

use serde::{Deserialize, Serialize};

/// Direction of a one-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Towards the front of the list
    Up,
    /// Towards the back of the list
    Down,
}

/// One absolute order assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssignment {
    /// Index of the item in the rendered list
    pub index: usize,
    /// New absolute order value (a list position)
    pub order: u32,
}

/// The two assignments making up a pairwise swap
///
/// `moving` is the item the user picked, `displaced` is the neighbour it
/// trades places with. Execution order follows the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    /// The picked item, receiving the neighbour's position
    pub moving: OrderAssignment,
    /// The neighbour, receiving the picked item's old position
    pub displaced: OrderAssignment,
}

/// Plan a one-step move of the item at `index` in a list of `len` items.
///
/// Returns `None` when the move falls off either end of the list (first
/// item up, last item down) or when `index` is out of range; callers treat
/// that as a silent no-op. The assigned `order` values are list positions,
/// which keeps the swap correct regardless of what sparse order keys the
/// items carried before.
pub fn plan_move(len: usize, index: usize, direction: MoveDirection) -> Option<SwapPlan> {
    if index >= len {
        return None;
    }

    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            let next = index + 1;
            if next >= len {
                return None;
            }
            next
        }
    };

    Some(SwapPlan {
        moving: OrderAssignment {
            index,
            order: u32::try_from(target).ok()?,
        },
        displaced: OrderAssignment {
            index: target,
            order: u32::try_from(index).ok()?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_cannot_move_up() {
        assert_eq!(plan_move(3, 0, MoveDirection::Up), None);
    }

    #[test]
    fn last_item_cannot_move_down() {
        assert_eq!(plan_move(3, 2, MoveDirection::Down), None);
    }

    #[test]
    fn empty_and_single_item_lists_never_move() {
        assert_eq!(plan_move(0, 0, MoveDirection::Up), None);
        assert_eq!(plan_move(0, 0, MoveDirection::Down), None);
        assert_eq!(plan_move(1, 0, MoveDirection::Up), None);
        assert_eq!(plan_move(1, 0, MoveDirection::Down), None);
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        assert_eq!(plan_move(3, 3, MoveDirection::Up), None);
        assert_eq!(plan_move(3, 7, MoveDirection::Down), None);
    }

    #[test]
    fn moving_down_swaps_with_the_next_item() {
        // [A, B, C], move B down: B takes position 2, C takes position 1
        let plan = plan_move(3, 1, MoveDirection::Down).unwrap();
        assert_eq!(plan.moving, OrderAssignment { index: 1, order: 2 });
        assert_eq!(plan.displaced, OrderAssignment { index: 2, order: 1 });
    }

    #[test]
    fn moving_up_swaps_with_the_previous_item() {
        let plan = plan_move(3, 1, MoveDirection::Up).unwrap();
        assert_eq!(plan.moving, OrderAssignment { index: 1, order: 0 });
        assert_eq!(plan.displaced, OrderAssignment { index: 0, order: 1 });
    }

    #[test]
    fn interior_move_in_a_longer_list() {
        let plan = plan_move(5, 3, MoveDirection::Down).unwrap();
        assert_eq!(plan.moving.index, 3);
        assert_eq!(plan.moving.order, 4);
        assert_eq!(plan.displaced.index, 4);
        assert_eq!(plan.displaced.order, 3);
    }
}
