//! Static constants.

use crate::num::Decimal;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ONE: Decimal = Decimal::from(1);
    pub static ref TWO: Decimal = Decimal::from(2);
}
