pub mod webdriver;

pub use webdriver::WebDriverSession;
