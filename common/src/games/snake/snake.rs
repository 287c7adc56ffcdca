use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction) -> Self {
        let tail = head.offset(direction.opposite());
        Self::from_segments([head, tail])
    }

    pub fn from_segments<I: IntoIterator<Item = Point>>(segments: I) -> Self {
        let body: VecDeque<Point> = segments.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn contains(&self, pos: &Point) -> bool {
        self.body_set.contains(pos)
    }

    /// Occupancy as it will be once the tail has moved on this tick.
    pub fn collides_after_tail_moves(&self, pos: &Point) -> bool {
        self.contains(pos) && *pos != self.tail()
    }

    pub fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
        self.body_set.insert(pos);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        // The new head may have just moved into the old tail cell.
        if let Some(tail) = self.body.pop_back()
            && tail != self.head()
        {
            self.body_set.remove(&tail);
        }
    }
}
