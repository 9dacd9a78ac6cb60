//! Expression evaluation walkthrough
//!
//! Run with: cargo run --example expr_eval

use mateval::eval::{LinearEvalPlan, PerColEvalPlan, Scalars};
use mateval::{
    add, evaluate_into, evaluate_linear, evaluate_percol, selects_linear, sqr, ConstMatrix,
    DenseMatrix, DenseView, Dyn,
};

fn main() {
    // Contiguous source: the selector picks linear organization for free.
    let x = DenseMatrix::from_vec(Dyn(4), Dyn(1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut y: DenseMatrix<f64, _, _> = DenseMatrix::zeros(Dyn(4), Dyn(1));

    evaluate_linear(&x, &mut y);
    println!("copy via linear     : {:?}", y.as_slice());

    evaluate_percol(&x, &mut y);
    println!("copy via per-column : {:?}", y.as_slice());

    // A computed tree pays the cache penalty under either organization.
    let c = ConstMatrix::new(Dyn(4), Dyn(1), 10.0);
    let expr = sqr(add(&x, &c));
    evaluate_into(&expr, &mut y);
    println!("(x + 10)^2          : {:?}", y.as_slice());

    type Tree = mateval::ZipExpr<DenseMatrix<f64, Dyn, Dyn>, DenseMatrix<f64, Dyn, Dyn>, mateval::ops::AddOp>;
    println!(
        "tree costs          : linear={} percol={} (linear wins ties: {})",
        <Tree as LinearEvalPlan<Scalars>>::COST,
        <Tree as PerColEvalPlan<Scalars>>::COST,
        selects_linear::<Tree>(),
    );

    // A strided window is dense but not contiguous: per-column stays direct.
    let buf: Vec<f64> = (0..12).map(f64::from).collect();
    let view = DenseView::new(Dyn(3), Dyn(3), 4, &buf).unwrap();
    let mut w: DenseMatrix<f64, _, _> = DenseMatrix::zeros(Dyn(3), Dyn(3));
    evaluate_percol(&view, &mut w);
    println!(
        "strided window      : {:?} (selector prefers linear: {})",
        w.as_slice(),
        selects_linear::<DenseView<'static, f64, Dyn, Dyn>>(),
    );
}
