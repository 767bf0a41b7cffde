use log::info;
use tabula::{matrix, row, Complex64, LResult, Matrix, Rational64};

fn main() -> LResult<()> {
    env_logger::init();

    let mut m1 = matrix![
        [0, 0, 0],
        [1, 1, 1],
        [2, 2, 2],
        [3, 3, 3],
    ]?;
    let m2 = Matrix::from(&m1);
    m1.set(0, [9, 9, 9])?;
    info!("m1 after set:\n{}", m1);
    info!("m2 untouched:\n{}", m2);

    let sum = (&m1 + &m2)?;
    println!("{}\n", sum);

    let mixed = row![1, 2.5, Rational64::new(3, 4), Complex64::new(1.0, 2.0)];
    println!("{}", (&mixed * 2)?);
    println!("{}\n", (&mixed / 2)?);

    let m3 = (&m2 * 3.5)?;
    println!("{}\n", m3);
    for col in m3.iter_cols() {
        println!("{}", col);
    }
    Ok(())
}
