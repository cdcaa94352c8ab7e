use gloo::net::http::Request;
use shared::{
    ContactRequest, ContactResponse, DeleteResponse, Product, ProductListResponse, ProductPayload,
    Program, ProgramListResponse, ProgramPayload,
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full product catalog, newest first
    pub async fn get_products(&self) -> Result<Vec<Product>, String> {
        let url = format!("{}/api/products", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ProductListResponse>().await {
                Ok(data) => Ok(data.products),
                Err(e) => Err(format!("Failed to parse products: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch products: {}", e)),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, String> {
        self.send_json(Request::post(&format!("{}/api/products", self.base_url)), payload)
            .await
    }

    /// Update an existing product
    pub async fn update_product(
        &self,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, String> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);
        self.send_json(Request::patch(&url), payload).await
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: &str) -> Result<DeleteResponse, String> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<DeleteResponse>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(response.text().await.unwrap_or_else(|_| "Unknown error".to_string()))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch all programs, newest first
    pub async fn get_programs(&self) -> Result<Vec<Program>, String> {
        let url = format!("{}/api/programs", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ProgramListResponse>().await {
                Ok(data) => Ok(data.programs),
                Err(e) => Err(format!("Failed to parse programs: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch programs: {}", e)),
        }
    }

    /// Create a new program
    pub async fn create_program(&self, payload: &ProgramPayload) -> Result<Program, String> {
        self.send_json(Request::post(&format!("{}/api/programs", self.base_url)), payload)
            .await
    }

    /// Update an existing program
    pub async fn update_program(
        &self,
        program_id: &str,
        payload: &ProgramPayload,
    ) -> Result<Program, String> {
        let url = format!("{}/api/programs/{}", self.base_url, program_id);
        self.send_json(Request::patch(&url), payload).await
    }

    /// Delete a program
    pub async fn delete_program(&self, program_id: &str) -> Result<DeleteResponse, String> {
        let url = format!("{}/api/programs/{}", self.base_url, program_id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<DeleteResponse>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(response.text().await.unwrap_or_else(|_| "Unknown error".to_string()))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Submit the contact form
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactResponse, String> {
        let url = format!("{}/api/contact", self.base_url);
        self.send_json(Request::post(&url), request).await
    }

    async fn send_json<B, T>(&self, builder: gloo::net::http::RequestBuilder, body: &B) -> Result<T, String>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let request = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<T>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
