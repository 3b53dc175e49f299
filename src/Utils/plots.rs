use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::solution::Solution;
use plotters::prelude::*;

fn plot_err<E: std::fmt::Display>(e: E) -> FDError {
    FDError::Io(format!("plotting failed: {}", e))
}

/// PNG plot of the numerical solution and, if given, the exact solution on the same grid
pub fn plot_solution(
    solution: &Solution,
    exact: Option<&dyn Fn(f64) -> f64>,
    title: &str,
    filename: &str,
) -> Result<(), FDError> {
    let numeric: Vec<(f64, f64)> = solution.points();
    let reference: Option<Vec<(f64, f64)>> =
        exact.map(|exact| numeric.iter().map(|&(x, _)| (x, exact(x))).collect());

    let all_y = numeric
        .iter()
        .chain(reference.iter().flatten())
        .map(|&(_, y)| y);
    let (y_min, y_max) = all_y.fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    // keep a visible band for constant solutions
    let pad = 0.05 * (y_max - y_min).abs().max(1e-3);

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.0, (y_min - pad)..(y_max + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("u")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(numeric, &Palette99::pick(0)))
        .map_err(plot_err)?
        .label("numerical")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(0)));

    if let Some(reference) = reference {
        chart
            .draw_series(LineSeries::new(reference, &Palette99::pick(1)))
            .map_err(plot_err)?
            .label("exact")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(1)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;
    root_area.present().map_err(plot_err)?;
    Ok(())
}
