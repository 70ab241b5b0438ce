pub mod echo;
pub mod google;

pub use echo::EchoTranslator;
pub use google::GoogleTranslator;
