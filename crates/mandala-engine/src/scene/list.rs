use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands paint strictly in insertion order (back-to-front); that order is
/// also what determinism checks compare, so there is no sorting stage.
///
/// `push()` is O(1); `clear()` keeps allocated capacity for reuse across
/// frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Stroke;
    use crate::scene::shapes::circle::CircleCmd;

    fn circle(radius: f32) -> DrawCmd {
        DrawCmd::Circle(CircleCmd::new(
            Vec2::zero(),
            radius,
            Stroke::new(1.0, Color::WHITE),
        ))
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push(circle(1.0));
        list.push(circle(2.0));
        list.push(circle(3.0));

        let radii: Vec<f32> = list
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Circle(c) => c.radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push(circle(1.0));
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
