use nalgebra as na;

/// Builds the conic matrix $A_Q$ of an ellipse with semi-axes `a`, `b`, rotation `theta` (radians)
/// and center `(x, y)`, scaled by $a^2 b^2$ so that degenerate axes stay finite.
///
/// With $M = R \, \mathrm{diag}(b^2, a^2) \, R^T$ and center $c$:
///
/// $$A_Q = \begin{bmatrix} M & -Mc \\ -c^T M & c^T M c - a^2 b^2 \end{bmatrix}$$
///
/// See https://en.wikipedia.org/wiki/Matrix_representation_of_conic_sections
pub fn compute_matrix<F: na::RealField + Copy>(a: F, b: F, theta: F, x: F, y: F) -> na::Matrix3<F> {
    let rotation = na::Rotation2::new(theta).into_inner();
    let m = rotation
        * na::Matrix2::from_diagonal(&na::Vector2::new(b.powi(2), a.powi(2)))
        * rotation.transpose();

    let c = na::Vector2::new(x, y);
    let mc = m * c;
    let f = c.dot(&mc) - a.powi(2) * b.powi(2);

    let mut mat = na::Matrix3::zeros();
    mat.fixed_view_mut::<2, 2>(0, 0).copy_from(&m);
    mat.fixed_view_mut::<2, 1>(0, 2).copy_from(&-mc);
    mat.fixed_view_mut::<1, 2>(2, 0).copy_from(&-mc.transpose());
    mat[(2, 2)] = f;
    mat
}

/// Value of $[x\ y\ 1] A_Q [x\ y\ 1]^T$: negative inside the ellipse, zero on the boundary and
/// positive outside.
pub fn evaluate<F: na::RealField + Copy>(matrix: &na::Matrix3<F>, point: &na::Point2<F>) -> F {
    let p = point.to_homogeneous();
    p.dot(&(matrix * p))
}
