//! Board layout assignment.
//!
//! Places the items of a board into three slots: a featured main piece in the
//! center and two side columns. Columns are filled role-balanced: the first
//! bottom goes left, the first footwear goes right, accessories alternate
//! left/right, and anything else goes to the shorter column (ties go left).
//!
//! The saved style card uses a simpler two-column collage, see
//! [`assign_collage`].

use crate::models::{BoardLayout, CategoryRole, CollageLayout, WardrobeItem};

/// Assigns board items to the main piece and the two side columns.
///
/// The main piece is the first item whose role is [`CategoryRole::Top`], or
/// the first item overall if there is no top. An empty list yields an empty
/// layout. The assignment is a pure function of the input order.
///
/// # Examples
///
/// ```
/// use styleboard::models::WardrobeItem;
/// use styleboard::services::layout::assign_layout;
///
/// let items = vec![
///     WardrobeItem::new("2", "u", "Denim", "Jeans", "jeans.jpg")?,
///     WardrobeItem::new("1", "u", "Oxford", "Shirt", "shirt.jpg")?,
/// ];
/// let layout = assign_layout(&items);
/// assert_eq!(layout.main_piece.map(|item| item.id), Some("1".to_string()));
/// assert_eq!(layout.left.len(), 1);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn assign_layout(items: &[WardrobeItem]) -> BoardLayout {
    let roles: Vec<CategoryRole> = items.iter().map(WardrobeItem::role).collect();

    let main_index = roles
        .iter()
        .position(|role| *role == CategoryRole::Top)
        .or_else(|| (!items.is_empty()).then_some(0));

    let Some(main_index) = main_index else {
        return BoardLayout::default();
    };

    // Side items keep their original relative order; exclusion is by
    // position so a repeated ID elsewhere on the board still gets a slot.
    let side: Vec<(&WardrobeItem, CategoryRole)> = items
        .iter()
        .zip(roles.iter().copied())
        .enumerate()
        .filter(|(index, _)| *index != main_index)
        .map(|(_, pair)| pair)
        .collect();

    let first_of = |wanted: CategoryRole| side.iter().position(|(_, role)| *role == wanted);
    let bottom_index = first_of(CategoryRole::Bottom);
    let footwear_index = first_of(CategoryRole::Footwear);

    let mut left = Vec::new();
    let mut right = Vec::new();

    if let Some(index) = bottom_index {
        left.push(side[index].0.clone());
    }
    if let Some(index) = footwear_index {
        right.push(side[index].0.clone());
    }

    let accessories = side
        .iter()
        .filter(|(_, role)| *role == CategoryRole::Accessory);
    for (placed, (item, _)) in accessories.enumerate() {
        if placed % 2 == 0 {
            left.push((*item).clone());
        } else {
            right.push((*item).clone());
        }
    }

    let leftovers = side.iter().enumerate().filter(|(index, (_, role))| {
        *role != CategoryRole::Accessory
            && Some(*index) != bottom_index
            && Some(*index) != footwear_index
    });
    for (_, (item, _)) in leftovers {
        if left.len() <= right.len() {
            left.push((*item).clone());
        } else {
            right.push((*item).clone());
        }
    }

    BoardLayout {
        main_piece: Some(items[main_index].clone()),
        left,
        right,
    }
}

/// Arranges board items for the saved style card image.
///
/// - left column: the first top, then the first bottom
/// - right column: every accessory in board order, then the first footwear
///
/// Tops, bottoms and footwear beyond the first of each role are not shown.
/// Missing roles simply leave their slot out.
pub fn assign_collage(items: &[WardrobeItem]) -> CollageLayout {
    let first_of = |wanted: CategoryRole| items.iter().find(|item| item.role() == wanted);

    let left = [CategoryRole::Top, CategoryRole::Bottom]
        .into_iter()
        .filter_map(first_of)
        .cloned()
        .collect();

    let mut right: Vec<WardrobeItem> = items
        .iter()
        .filter(|item| item.role() == CategoryRole::Accessory)
        .cloned()
        .collect();
    right.extend(first_of(CategoryRole::Footwear).cloned());

    CollageLayout { left, right }
}
