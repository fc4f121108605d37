//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Sphere};
use prism_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the geometry
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with a `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Closed set of intersectable primitives.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

/// A flat list of shapes, tested by linear scan.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Shape>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Shape>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.objects.iter()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let max = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(max)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn gray() -> Arc<Material> {
        Arc::new(Material::lambertian(Vec3::splat(0.5)))
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_regardless_of_order() {
        let mat = gray();
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, mat.clone());
        let far = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, mat);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let ray_t = Interval::new(0.001, f32::INFINITY);

        let mut forward = HittableList::new();
        forward.add(near.clone());
        forward.add(far.clone());

        let mut backward = HittableList::new();
        backward.add(far);
        backward.add(near);

        let a = forward.hit(&ray, ray_t).unwrap();
        let b = backward.hit(&ray, ray_t).unwrap();
        assert!((a.t - 1.5).abs() < 1e-5);
        assert!((b.t - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_hit_respects_upper_bound() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, gray()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(world.hit(&ray, Interval::new(0.001, 5.0)).is_none());
        assert!(world.hit(&ray, Interval::new(0.001, 20.0)).is_some());
    }

    #[test]
    fn test_hit_carries_material() {
        let red = Arc::new(Material::lambertian(Vec3::new(1.0, 0.0, 0.0)));
        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, red.clone()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.material, red.as_ref());
    }
}
