use crate::math::{Point3, Vector3};
use crate::operations::query::Aabb;

use super::edge::{EdgeFinish, EdgeTreatment, Face};

/// Dimensions of a wedge, using the usual `dx, dy, dz, xmin, zmin, xmax, zmax`
/// convention: the base rectangle `dx × dz` lies in the plane `y = 0` and the
/// top rectangle `[xmin, xmax] × [zmin, zmax]` lies in the plane `y = dy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeProfile {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub xmin: f64,
    pub zmin: f64,
    pub xmax: f64,
    pub zmax: f64,
}

impl WedgeProfile {
    fn min_corner(&self) -> Point3 {
        Point3::new(self.xmin.min(0.0), 0.0, self.zmin.min(0.0))
    }

    fn max_corner(&self) -> Point3 {
        Point3::new(self.xmax.max(self.dx), self.dy, self.zmax.max(self.dz))
    }

    /// Offset from the wedge's own corner frame to its bounding-box center.
    fn center(&self) -> Vector3 {
        (self.min_corner().coords + self.max_corner().coords) * 0.5
    }
}

/// A primitive solid in its local frame, centered on its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Cuboid {
        half_extents: Vector3,
        edges: Vec<EdgeTreatment>,
    },
    Wedge(WedgeProfile),
    /// Cylinder along the local Z axis.
    Cylinder { radius: f64, half_height: f64 },
}

impl Primitive {
    /// Local-frame bounding box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        match self {
            Self::Cuboid { half_extents, .. } => {
                Aabb::new(Point3::from(-half_extents), Point3::from(*half_extents))
            }
            Self::Wedge(w) => {
                let c = w.center();
                Aabb::new(w.min_corner() - c, w.max_corner() - c)
            }
            Self::Cylinder {
                radius,
                half_height,
            } => Aabb::new(
                Point3::new(-radius, -radius, -half_height),
                Point3::new(*radius, *radius, *half_height),
            ),
        }
    }

    /// Whether a local-frame point lies inside the (closed) primitive.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        match self {
            Self::Cuboid {
                half_extents,
                edges,
            } => cuboid_contains(half_extents, edges, p),
            Self::Wedge(w) => wedge_contains(w, p),
            Self::Cylinder {
                radius,
                half_height,
            } => p.z.abs() <= *half_height && p.x * p.x + p.y * p.y <= radius * radius,
        }
    }
}

fn cuboid_contains(half: &Vector3, edges: &[EdgeTreatment], p: &Point3) -> bool {
    if p.x.abs() > half.x || p.y.abs() > half.y || p.z.abs() > half.z {
        return false;
    }
    let depth = |face: Face| half[face.axis.index()] - face.sign() * p[face.axis.index()];
    for treatment in edges {
        let da = depth(treatment.edge.a);
        let db = depth(treatment.edge.b);
        match treatment.finish {
            EdgeFinish::Chamfer(d) => {
                if da + db < d {
                    return false;
                }
            }
            EdgeFinish::Fillet(r) => {
                if da < r && db < r {
                    let (u, v) = (r - da, r - db);
                    if u * u + v * v > r * r {
                        return false;
                    }
                }
            }
        }
    }
    true
}

fn wedge_contains(w: &WedgeProfile, p: &Point3) -> bool {
    let q = p + w.center();
    if q.y < 0.0 || q.y > w.dy {
        return false;
    }
    let t = q.y / w.dy;
    let x_lo = w.xmin * t;
    let x_hi = w.dx + (w.xmax - w.dx) * t;
    let z_lo = w.zmin * t;
    let z_hi = w.dz + (w.zmax - w.dz) * t;
    q.x >= x_lo && q.x <= x_hi && q.z >= z_lo && q.z <= z_hi
}
