/*
 * Responsibility
 * - public interface of the middleware stack (re-export)
 */
pub mod cors;
pub mod http;
