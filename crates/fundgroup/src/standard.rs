//! Small standard triangulations with known fundamental groups.
//!
//! | complex                   | π₁                 | abelianization |
//! |---------------------------|--------------------|----------------|
//! | `circle(n)`               | Z                  | Z              |
//! | `disk()`, `simplex(d)`    | 1                  | 0              |
//! | `sphere(d)`, d ≥ 2        | 1                  | 0              |
//! | `torus()`                 | Z²                 | Z²             |
//! | `real_projective_plane()` | Z/2                | Z/2            |
//! | `klein_bottle()`          | ⟨a,b \| abab⁻¹⟩    | Z + Z/2        |
//! | `wedge_of_circles(k)`     | free of rank k     | Z^k            |

use crate::complex::Complex;

/// Hollow `n`-gon on vertices `0..n` (`n` clamped to at least 3).
pub fn circle(n: usize) -> Complex {
    let n = n.max(3);
    Complex::from_simplices((0..n).map(|i| [i, (i + 1) % n]))
}

/// Full `d`-simplex on vertices `0..=d`.
pub fn simplex(d: usize) -> Complex {
    let vs: Vec<usize> = (0..=d).collect();
    Complex::from_simplices([vs])
}

/// Filled triangle.
pub fn disk() -> Complex {
    simplex(2)
}

/// Boundary of the `(d+1)`-simplex, a triangulated `d`-sphere.
pub fn sphere(d: usize) -> Complex {
    let n = d + 2;
    Complex::from_simplices((0..n).map(|skip| (0..n).filter(|&v| v != skip).collect::<Vec<_>>()))
}

/// Seven-vertex (Möbius) torus.
pub fn torus() -> Complex {
    Complex::from_simplices([
        [0, 1, 2],
        [1, 2, 4],
        [1, 3, 4],
        [1, 3, 6],
        [0, 1, 5],
        [1, 5, 6],
        [2, 3, 5],
        [2, 4, 5],
        [2, 3, 6],
        [0, 2, 6],
        [0, 3, 4],
        [0, 3, 5],
        [4, 5, 6],
        [0, 4, 6],
    ])
}

/// Six-vertex real projective plane (hemi-icosahedron).
pub fn real_projective_plane() -> Complex {
    Complex::from_simplices([
        [0, 1, 2],
        [0, 2, 3],
        [0, 1, 5],
        [0, 4, 5],
        [0, 3, 4],
        [1, 2, 4],
        [1, 3, 4],
        [1, 3, 5],
        [2, 3, 5],
        [2, 4, 5],
    ])
}

/// Eight-vertex Klein bottle.
pub fn klein_bottle() -> Complex {
    Complex::from_simplices([
        [2, 3, 7],
        [1, 2, 3],
        [1, 3, 5],
        [1, 5, 7],
        [1, 4, 7],
        [2, 4, 6],
        [1, 2, 6],
        [1, 6, 0],
        [1, 4, 0],
        [2, 4, 0],
        [3, 4, 7],
        [3, 4, 6],
        [3, 5, 6],
        [5, 6, 0],
        [2, 5, 0],
        [2, 5, 7],
    ])
}

/// `k` triangles-as-circles glued at vertex 0 (`2k + 1` vertices).
pub fn wedge_of_circles(k: usize) -> Complex {
    let mut c = Complex::new();
    c.add_simplex(&[0]);
    for i in 0..k {
        let (a, b) = (2 * i + 1, 2 * i + 2);
        c.add_simplex(&[0, a]);
        c.add_simplex(&[a, b]);
        c.add_simplex(&[0, b]);
    }
    c
}
