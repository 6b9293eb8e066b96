use super::FuelComposition;

/// 탄소 발열 계수 [kJ/kg per %]
const C_HEAT: f64 = 339.0;
/// 수소 발열 계수 [kJ/kg per %]
const H_HEAT: f64 = 1030.0;
/// 산소-황 보정 계수 [kJ/kg per %]
const OS_HEAT: f64 = 108.8;
/// 수분 증발 잠열 계수 [kJ/kg per %]
const W_HEAT: f64 = 25.0;

/// 연료 조성에서 유도한 연소 지표.
///
/// 0 나눗셈(`wp = 100`, `wp + ap = 100`)은 막지 않으므로 값이 `inf`/`NaN`일 수 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionMetrics {
    /// 사용 상태 → 건조 기준 환산 계수
    pub kpc: f64,
    /// 사용 상태 → 가연 기준 환산 계수
    pub kpg: f64,
    pub hc: f64,
    pub cc: f64,
    pub sc: f64,
    pub nc: f64,
    pub oc: f64,
    pub ac: f64,
    pub hg: f64,
    pub cg: f64,
    pub sg: f64,
    pub ng: f64,
    pub og: f64,
    /// 사용 상태 저위 발열량 [kJ/kg]
    pub qrn: f64,
    /// 건조 기준 저위 발열량 [kJ/kg]
    pub qsn: f64,
    /// 가연 기준 저위 발열량 [kJ/kg]
    pub qgn: f64,
}

impl CombustionMetrics {
    /// 멘델레예프식 기반으로 기준별 조성과 저위 발열량을 계산한다.
    pub fn from_composition(c: &FuelComposition) -> Self {
        let kpc = 100.0 / (100.0 - c.wp);
        let kpg = 100.0 / (100.0 - c.wp - c.ap);

        let qrn = C_HEAT * c.cp + H_HEAT * c.hp - OS_HEAT * (c.op - c.sp) - W_HEAT * c.wp;
        // 수분 잠열을 되돌린 뒤 기준 환산
        let q_dry = qrn + W_HEAT * c.wp;
        let qsn = q_dry * 100.0 / (100.0 - c.wp);
        let qgn = q_dry * 100.0 / (100.0 - c.wp - c.ap);

        Self {
            kpc,
            kpg,
            hc: c.hp * kpc,
            cc: c.cp * kpc,
            sc: c.sp * kpc,
            nc: c.np * kpc,
            oc: c.op * kpc,
            ac: c.ap * kpc,
            hg: c.hp * kpg,
            cg: c.cp * kpg,
            sg: c.sp * kpg,
            ng: c.np * kpg,
            og: c.op * kpg,
            qrn,
            qsn,
            qgn,
        }
    }

    /// `OUTPUT_FIELDS`와 같은 순서의 값 배열.
    pub fn values(&self) -> [f64; 16] {
        [
            self.kpc, self.kpg, self.hc, self.cc, self.sc, self.nc, self.oc, self.ac, self.hg,
            self.cg, self.sg, self.ng, self.og, self.qrn, self.qsn, self.qgn,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_fuel() {
        let c = FuelComposition {
            hp: 5.0,
            cp: 50.0,
            sp: 1.0,
            np: 1.0,
            op: 5.0,
            wp: 8.0,
            ap: 30.0,
        };
        let m = CombustionMetrics::from_composition(&c);
        assert!((m.kpc - 100.0 / 92.0).abs() < 1e-12);
        assert!((m.kpg - 100.0 / 62.0).abs() < 1e-12);
        assert!((m.qrn - 21_464.8).abs() < 1e-9);
        assert!((m.qsn - 21_664.8 * 100.0 / 92.0).abs() < 1e-9);
        assert!((m.qgn - 21_664.8 * 100.0 / 62.0).abs() < 1e-9);
    }

    #[test]
    fn all_moisture_divides_by_zero() {
        let c = FuelComposition {
            hp: 0.0,
            cp: 0.0,
            sp: 0.0,
            np: 0.0,
            op: 0.0,
            wp: 100.0,
            ap: 0.0,
        };
        let m = CombustionMetrics::from_composition(&c);
        assert!(m.kpc.is_infinite());
        assert!(m.hc.is_nan());
        assert_eq!(m.qrn, -2500.0);
    }
}
