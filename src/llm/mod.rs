pub mod openai_compatible_llm;
pub mod stateless_llm_factory;
pub mod stateless_llm_interface;

pub use openai_compatible_llm::OpenAICompatibleLLM;
pub use stateless_llm_factory::StatelessLLMFactory;
pub use stateless_llm_interface::{ChatMessage, LLMError, StatelessLLMInterface};
