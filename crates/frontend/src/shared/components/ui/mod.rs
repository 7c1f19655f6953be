pub mod multi_select;
pub mod number_input;
pub mod range_slider;
pub mod select;

pub use multi_select::MultiSelect;
pub use number_input::NumberInput;
pub use range_slider::RangeSlider;
pub use select::Select;
