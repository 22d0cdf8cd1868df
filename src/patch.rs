//! A patch of flowers sharing one area.
//!
//! Agents training in an area need to refill every flower between episodes
//! and find the closest flower that is still worth flying to. Flowers are
//! addressed by the index returned from [`FlowerPatch::add`].

use cgmath::{InnerSpace, Vector3};

use crate::flower::Flower;

#[derive(Clone, Debug, Default)]
pub struct FlowerPatch {
    flowers: Vec<Flower>,
}

impl FlowerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flower and returns its index.
    pub fn add(&mut self, flower: Flower) -> usize {
        self.flowers.push(flower);
        self.flowers.len() - 1
    }

    pub fn get(&self, idx: usize) -> Option<&Flower> {
        self.flowers.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Flower> {
        self.flowers.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flower> {
        self.flowers.iter()
    }

    pub fn reset_all(&mut self) {
        self.flowers.iter_mut().for_each(Flower::reset);
        log::debug!("reset {} flowers", self.flowers.len());
    }

    pub fn total_nectar(&self) -> f32 {
        self.flowers.iter().map(Flower::nectar_amount).sum()
    }

    /// Index of the closest flower that still has nectar.
    pub fn nearest_with_nectar(&self, point: Vector3<f32>) -> Option<usize> {
        self.flowers
            .iter()
            .enumerate()
            .filter(|(_, flower)| flower.has_nectar())
            .map(|(idx, flower)| (idx, (flower.center_position() - point).magnitude2()))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(idx, _)| idx)
    }

    /// Index of the first flower whose nectar sensor contains `point`.
    pub fn sensor_hit(&self, point: Vector3<f32>) -> Option<usize> {
        self.flowers.iter().position(|flower| flower.can_feed_at(point))
    }

    /**
     * Feeds from whichever flower's sensor contains `point`.
     *
     * Returns the nectar taken, or zero when `point` touches no nectar.
     */
    pub fn feed_at(&mut self, point: Vector3<f32>, amount: f32) -> f32 {
        match self.sensor_hit(point) {
            Some(idx) => self.flowers[idx].feed(amount),
            None => 0.0,
        }
    }
}
