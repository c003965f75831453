mod contact;
mod ingress;
