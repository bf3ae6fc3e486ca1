use serde::{Deserialize, Serialize};

/// Fixed set of cities the coordinate resolver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Cairo,
    Alexandria,
    Giza,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Cairo => "Cairo",
            City::Alexandria => "Alexandria",
            City::Giza => "Giza",
        }
    }

    /// Parse a stored city name back into the enum. Unknown names yield
    /// `None` so the repository can surface them as data faults.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Cairo" => Some(City::Cairo),
            "Alexandria" => Some(City::Alexandria),
            "Giza" => Some(City::Giza),
            _ => None,
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a user that does not exist yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub city: City,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: i32,
    name: String,
    email: String,
    city: City,
}

impl User {
    pub fn new(id: i32, name: String, email: String, city: City) -> Self {
        Self {
            id,
            name,
            email,
            city,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn city(&self) -> City {
        self.city
    }
}
