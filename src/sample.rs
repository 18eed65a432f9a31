//! Reference instruction batch
//!
//! Ten instructions across SAR and SGP, one of which carries the unknown
//! currency `LOD` and is rejected.

use crate::instruction::RawInstruction;
use crate::types::Amount;
use num_bigint::BigInt;

fn instruction(
    entity: &str,
    direction: &str,
    currency: &str,
    rate: Amount,
    dates: (&str, &str),
    units: u64,
    price: Amount,
) -> RawInstruction {
    RawInstruction::new(entity, direction, currency)
        .with_exchange_rate(rate)
        .with_units(units)
        .with_price_per_unit(price)
        .with_date_text(dates.0, dates.1)
}

/// `digits * 10^-scale`
fn decimal(digits: i64, scale: i64) -> Amount {
    Amount::new(BigInt::from(digits), scale)
}

/// The reference batch: 9 valid instructions (4 buys, 5 sells) and 1 invalid
pub fn reference_instructions() -> Vec<RawInstruction> {
    let half = || decimal(50, 2);
    vec![
        instruction("foo", "B", "SAR", decimal(950, 2), ("01 Jan 2016", "08 Sep 2018"), 200, decimal(7_020_000_000_025, 2)),
        instruction("bar", "B", "SAR", decimal(250, 2), ("01 Jan 2016", "15 Sep 2018"), 2000, decimal(5_990_000_000_000_025, 2)),
        instruction("baz", "B", "SAR", half(), ("01 Jan 2016", "08 Sep 2018"), 2000, decimal(100_000_000_121, 7)),
        instruction("tim", "B", "SGP", decimal(55, 2), ("21 Jan 2018", "21 Jan 2018"), 2000, decimal(92_025, 2)),
        instruction("bar", "S", "SGP", half(), ("01 Jan 2016", "13 Sep 2018"), 2000, decimal(25, 2)),
        instruction("baz", "S", "SGP", half(), ("01 Jan 2016", "08 Sep 2018"), 2000, decimal(222_325, 6)),
        instruction("foo", "S", "SGP", half(), ("21 Jan 2016", "21 Sep 2018"), 2000, decimal(253_232, 6)),
        instruction("bar", "S", "SGP", decimal(640, 2), ("01 Jan 2016", "19 Sep 2018"), 2430, decimal(80_025, 2)),
        instruction("der", "S", "SGP", half(), ("01 Jan 2016", "08 Sep 2018"), 2000, decimal(25, 2)),
        instruction("zero", "S", "LOD", half(), ("01 Jan 2016", "08 Sep 2018"), 2000, decimal(25, 2)),
    ]
}
