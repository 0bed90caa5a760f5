#[cfg(feature = "csr")]
fn main() {
    photo_wall::start();
}

#[cfg(not(feature = "csr"))]
fn main() {}
