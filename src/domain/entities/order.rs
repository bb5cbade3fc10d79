//! Order entities: plain data, calculations live in `services::orders`

use crate::domain::value_objects::Money;
use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> LibraryResult<Self> {
        let email = email.into();
        if !email.contains('@') {
            return Err(LibraryError::InvalidEmail { email });
        }
        Ok(Self {
            name: name.into(),
            email,
            age,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    products: Vec<Product>,
}

impl Order {
    pub fn new(id: impl Into<String>, customer: Customer, products: Vec<Product>) -> Self {
        Self {
            id: id.into(),
            customer,
            products,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
