// Copyright @yucwang 2026

use crate::core::collector::EnergyCollector;
use crate::core::interaction::{ HitRecord, HitTarget };
use crate::core::material::AcousticMaterial;
use crate::core::shape::Shape;
use crate::math::constants::{ Constants, Float, PI };
use crate::math::ray::Ray3f;
use crate::math::warp::fibonacci_sphere;
use std::sync::Arc;

/// Reflecting surface: geometry plus the material it is covered with.
#[derive(Clone)]
pub struct Obstacle {
    pub shape: Arc<dyn Shape>,
    pub material: Arc<dyn AcousticMaterial>,
}

impl Obstacle {
    pub fn new(shape: Arc<dyn Shape>, material: Arc<dyn AcousticMaterial>) -> Self {
        Self { shape, material }
    }

    pub fn ray_intersection(&self, ray: &Ray3f, frequency: Float, constants: &Constants) -> Option<HitRecord> {
        self.shape.ray_intersection(ray, frequency, constants)
    }

    pub fn reflection_coefficient(&self, frequency: Float) -> Float {
        self.material.reflection_coefficient(frequency)
    }
}

/// Obstacles and an ordered list of collectors. Fixed once built; results
/// are indexed by collector position.
#[derive(Clone)]
pub struct Scene {
    obstacles: Vec<Obstacle>,
    collectors: Vec<EnergyCollector>,
}

impl Scene {
    pub fn new(obstacles: Vec<Obstacle>, collectors: Vec<EnergyCollector>) -> Self {
        Self { obstacles, collectors }
    }

    /// Free field bounded only by `constants.population` collectors on a
    /// sphere of radius `constants.simulation_radius * size` around the
    /// origin. Neighbouring collectors overlap so every direction from the
    /// center ends in one of them.
    pub fn reference_model(size: Float, constants: &Constants) -> Self {
        let radius = constants.simulation_radius * size.abs();
        let count = constants.population;
        let collectors = fibonacci_sphere(count)
            .into_iter()
            .filter_map(|p| EnergyCollector::new(p * radius, reference_capture_radius(radius, count)))
            .collect();
        Self::new(Vec::new(), collectors)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn collectors(&self) -> &[EnergyCollector] {
        &self.collectors
    }

    pub fn obstacle(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// Closest hit over all obstacles, then all collectors. A candidate only
    /// replaces the current best when it is closer by more than
    /// `constants.accuracy`, so equal times go to the entity declared first.
    pub fn nearest_hit(&self, ray: &Ray3f, frequency: Float, constants: &Constants) -> Option<HitRecord> {
        let obstacle_hits = self.obstacles.iter().enumerate().filter_map(|(i, obstacle)| {
            obstacle
                .ray_intersection(ray, frequency, constants)
                .map(|hit| hit.with_target(HitTarget::Obstacle(i)))
        });
        let collector_hits = self.collectors.iter().enumerate().filter_map(|(i, collector)| {
            collector
                .ray_intersection(ray, frequency, constants)
                .map(|hit| hit.with_target(HitTarget::Collector(i)))
        });

        let mut nearest: Option<HitRecord> = None;
        for hit in obstacle_hits.chain(collector_hits) {
            if hit.t() <= constants.accuracy {
                continue;
            }
            match nearest {
                Some(best) if hit.t() >= best.t() - constants.accuracy => {}
                _ => nearest = Some(hit),
            }
        }
        nearest
    }
}

/// Capture radius giving each of `count` collectors on a sphere of radius
/// `radius` an angular reach of 1.5 equal-area caps, capped at 60 degrees so
/// no collector swallows the center.
fn reference_capture_radius(radius: Float, count: usize) -> Float {
    let equal_area = (1.0 - 2.0 / count.max(1) as Float).clamp(-1.0, 1.0).acos();
    radius * (1.5 * equal_area).min(PI / 3.0).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::constant::ConstantAbsorption;
    use crate::math::constants::Vector3f;
    use crate::shapes::plane::Plane;
    use crate::shapes::sphere::Sphere;

    fn ray(o: Vector3f, d: Vector3f) -> Ray3f {
        Ray3f::new(o, d).unwrap()
    }

    fn sphere_obstacle(center: Vector3f, radius: Float) -> Obstacle {
        Obstacle::new(Arc::new(Sphere::new(center, radius).unwrap()), Arc::new(ConstantAbsorption::rigid()))
    }

    #[test]
    fn test_obstacle_pairs_shape_and_material() {
        let constants = Constants::default();
        let obstacle = Obstacle::new(Arc::new(Sphere::new(Vector3f::new(0.0, 0.0, 3.0), 1.0).unwrap()),
                                     Arc::new(ConstantAbsorption::new(0.4)));
        let hit = obstacle.ray_intersection(&ray(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0)), 1000.0, &constants);
        assert!((hit.unwrap().t() - 2.0).abs() < 1e-12);
        assert!((obstacle.reflection_coefficient(1000.0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_scene_nearest_hit_closest() {
        let constants = Constants::default();
        let scene = Scene::new(
            vec![
                sphere_obstacle(Vector3f::new(0.0, 0.0, 5.0), 0.5),
                sphere_obstacle(Vector3f::new(0.0, 0.0, 2.0), 0.5),
            ],
            vec![EnergyCollector::new(Vector3f::new(0.0, 0.0, 10.0), 0.5).unwrap()],
        );

        let hit = scene
            .nearest_hit(&ray(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0)), 1000.0, &constants)
            .unwrap();
        assert!((hit.t() - 1.5).abs() < 1e-12);
        assert_eq!(hit.target(), Some(HitTarget::Obstacle(1)));

        let sideways = scene.nearest_hit(&ray(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0)), 1000.0, &constants);
        assert!(sideways.is_none());
    }

    #[test]
    fn test_scene_collector_behind_obstacle_is_hidden() {
        let constants = Constants::default();
        let scene = Scene::new(
            vec![Obstacle::new(
                Arc::new(Plane::new(Vector3f::new(0.0, 0.0, 3.0), Vector3f::new(0.0, 0.0, 1.0)).unwrap()),
                Arc::new(ConstantAbsorption::new(0.5)),
            )],
            vec![EnergyCollector::new(Vector3f::new(0.0, 0.0, 6.0), 1.0).unwrap()],
        );
        let hit = scene
            .nearest_hit(&ray(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0)), 1000.0, &constants)
            .unwrap();
        assert_eq!(hit.target(), Some(HitTarget::Obstacle(0)));
        assert!((scene.obstacle(0).unwrap().reflection_coefficient(1000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scene_ties_follow_declaration_order() {
        let constants = Constants::default();
        let center = Vector3f::new(0.0, 0.0, 3.0);
        let towards = ray(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));

        // Obstacle and collector share the surface: the obstacle wins.
        let scene = Scene::new(
            vec![sphere_obstacle(center, 1.0)],
            vec![EnergyCollector::new(center, 1.0).unwrap()],
        );
        let hit = scene.nearest_hit(&towards, 1000.0, &constants).unwrap();
        assert_eq!(hit.target(), Some(HitTarget::Obstacle(0)));

        // Two collectors within the tie window: the first declared wins.
        let scene = Scene::new(
            Vec::new(),
            vec![
                EnergyCollector::new(center, 1.0).unwrap(),
                EnergyCollector::new(center + Vector3f::new(0.0, 0.0, -1e-9), 1.0).unwrap(),
            ],
        );
        let hit = scene.nearest_hit(&towards, 1000.0, &constants).unwrap();
        assert_eq!(hit.target(), Some(HitTarget::Collector(0)));

        // Clearly closer later collectors still win.
        let scene = Scene::new(
            Vec::new(),
            vec![
                EnergyCollector::new(center, 1.0).unwrap(),
                EnergyCollector::new(center + Vector3f::new(0.0, 0.0, -1e-3), 1.0).unwrap(),
            ],
        );
        let hit = scene.nearest_hit(&towards, 1000.0, &constants).unwrap();
        assert_eq!(hit.target(), Some(HitTarget::Collector(1)));
    }

    #[test]
    fn test_reference_model() {
        let constants = Constants::default();
        let scene = Scene::reference_model(1.0, &constants);
        assert!(scene.obstacles().is_empty());
        assert_eq!(scene.collectors().len(), 37);
        for collector in scene.collectors() {
            assert!((collector.center().norm() - 4.0).abs() < 1e-9);
            assert!(collector.radius() < collector.center().norm());
        }

        let doubled = Scene::reference_model(2.0, &constants);
        assert!((doubled.collectors()[0].center().norm() - 8.0).abs() < 1e-9);
        assert_eq!(scene.collectors(), Scene::reference_model(1.0, &constants).collectors());
    }

    #[test]
    fn test_reference_model_encloses_center() {
        let constants = Constants::default();
        let scene = Scene::reference_model(1.0, &constants);
        for d in crate::math::warp::fibonacci_sphere(500) {
            let hit = scene.nearest_hit(&ray(Vector3f::zeros(), d), 1000.0, &constants);
            assert!(matches!(hit.and_then(|h| h.target()), Some(HitTarget::Collector(_))));
        }
    }
}
