//! 명령줄에서 한 번 계산하고 결과 표를 출력한다.

use clap::Parser;
use fuel_combustion_calculator::{app::AppError, fuel, measurement, ui_cli};

#[derive(Parser)]
#[command(name = "fuel_combustion_calculator_cli")]
#[command(about = "Compute dry/ash-free composition and net calorific values", long_about = None)]
struct Cli {
    /// 수소 Hp [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    hp: String,
    /// 탄소 Cp [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    cp: String,
    /// 황 Sp [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    sp: String,
    /// 질소 Np [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    np: String,
    /// 산소 Op [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    op: String,
    /// 수분 Wp [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    wp: String,
    /// 회분 Ap [%]
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    ap: String,
}

impl Cli {
    fn value_of(&self, name: &str) -> Option<&str> {
        let v = match name {
            "hp" => &self.hp,
            "cp" => &self.cp,
            "sp" => &self.sp,
            "np" => &self.np,
            "op" => &self.op,
            "wp" => &self.wp,
            "ap" => &self.ap,
            _ => return None,
        };
        Some(v.as_str())
    }
}

fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let inputs = measurement::input_fields_from(|name| cli.value_of(name));
    let results = fuel::calculate(&inputs)?;
    ui_cli::print_report(&inputs, &results)?;
    Ok(())
}
